use clap::{Arg, ArgAction, Command, value_parser};

fn command_arg() -> Arg {
    Arg::new("command")
        .long("command")
        .short('c')
        .help("External timetable command to invoke (overrides config)")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Emit waybar custom-module JSON instead of plain text")
        .action(ArgAction::SetTrue)
}

pub fn build_cli() -> Command {
    Command::new("vitabar")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Feed the vitable timetable into a status bar")
        .long_about(
            "vitabar polls the vitable CLI for the currently ongoing class and \
            prints it to stdout, one line per refresh, in the protocol consumed \
            by waybar/i3blocks custom modules. The full day's schedule can be \
            raised as a desktop notification on demand.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Run the indicator loop: poll and print the ongoing class until interrupted")
                .arg(command_arg())
                .arg(
                    Arg::new("interval")
                        .long("interval")
                        .short('i')
                        .help("Refresh interval in seconds (overrides config, default: 30)")
                        .value_parser(value_parser!(u64).range(1..)),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("status")
                .about("Print the currently ongoing class once and exit")
                .arg(command_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("schedule")
                .about("Raise the full day's schedule as a desktop notification")
                .arg(command_arg()),
        )
}
