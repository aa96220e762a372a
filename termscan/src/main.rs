use termscan::commands::command_argument_builder;
use termscan::handlers;
use termscan_core::print_banner;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    if chosen_command.subcommand().is_none() {
        // No subcommand provided, just show the banner
        return;
    }

    match chosen_command.subcommand() {
        Some(("discover", primary_command)) => handlers::handle_discover(primary_command).await,
        Some(("extract", primary_command)) => handlers::handle_extract(primary_command).await,
        Some(("run", primary_command)) => handlers::handle_run(primary_command).await,
        _ => unreachable!("clap should ensure we don't get here"),
    }
}
