use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Perform a health check and exit
    #[clap(long)]
    pub health_check: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the activities service
    Service,
    /// Access various tools
    Tools {
        #[command(subcommand)]
        tool: Tool,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Tool {
    /// Print the seed activity catalog as JSON
    Catalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_runs_the_service() {
        let cli = Cli::try_parse_from(["mergington-activities"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.health_check);
    }

    #[test]
    fn parses_catalog_tool() {
        let cli = Cli::try_parse_from(["mergington-activities", "tools", "catalog"]).unwrap();
        match cli.command {
            Some(Command::Tools { tool }) => assert_eq!(tool, Tool::Catalog),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_health_check_flag() {
        let cli = Cli::try_parse_from(["mergington-activities", "--health-check"]).unwrap();
        assert!(cli.health_check);
    }
}
