mod command;
mod output;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    command::run()
}
