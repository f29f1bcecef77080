mod commands;
mod output;
mod terminal;

use commands::{CommandLine, scan};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    if commands.list_sources {
        scan::list_sources();
        return Ok(());
    }

    print::banner(commands.quiet);
    scan::scan(&commands).await
}
