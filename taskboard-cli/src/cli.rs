use clap::{Args, Parser, Subcommand, ValueEnum};
use taskboard_kanban::ClosestEdge;

#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(version)]
#[command(about = "A file-backed kanban board with drag-and-drop ordering")]
#[command(long_about = "
taskboard keeps a kanban board as YAML files in a .taskboard directory.
Columns and cards are reordered the way a drag-and-drop board would: a
dragged column lands before or after a target column, a card lands on a
column surface or above/below another card. The Completed column always
stays last.

Example usage:
  taskboard init --name \"Release\" --column Backlog --column Review
  taskboard column move <DRAGGED> <TARGET> --after
  taskboard item add <COLUMN> \"Write changelog\"
  taskboard item move <ITEM> --column <COLUMN> --onto <OTHER> --edge bottom
  taskboard activity --limit 5
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Record this actor in the activity log (overrides configuration)
    #[arg(long, global = true)]
    pub actor: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a board in the current directory
    Init {
        /// Board name
        #[arg(long, default_value = "Taskboard")]
        name: String,
        /// Board description
        #[arg(long)]
        description: Option<String>,
        /// Ordinary column to create between Now and Completed (repeatable)
        #[arg(long = "column")]
        columns: Vec<String>,
    },
    /// Show the board with every column and its items
    Show,
    /// Column operations
    #[command(subcommand)]
    Column(ColumnCommand),
    /// Item operations
    #[command(subcommand)]
    Item(ItemCommand),
    /// Show the activity log, newest first
    Activity {
        /// Maximum number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ColumnCommand {
    /// List columns in display order
    List,
    /// Show a column and its items
    Get { id: String },
    /// Add an ordinary column
    Add {
        name: String,
        /// Explicit position; defaults to after the last ordinary column
        #[arg(long, allow_negative_numbers = true)]
        position: Option<i64>,
    },
    /// Rename an ordinary column
    Rename { id: String, name: String },
    /// Delete an empty ordinary column
    Delete { id: String },
    /// Drop a column before (or after) another column
    Move {
        dragged: String,
        target: String,
        /// Drop after the target instead of before it
        #[arg(long)]
        after: bool,
    },
    /// Create missing Now and Completed columns
    Ensure,
}

#[derive(Subcommand, Debug)]
pub enum ItemCommand {
    /// Add an item at the bottom of a column
    Add {
        column: String,
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Show an item
    Get { id: String },
    /// Update an item's name or description
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete an item
    Delete { id: String },
    /// Drop an item onto a column or next to another item
    Move(MoveArgs),
}

#[derive(Args, Debug)]
pub struct MoveArgs {
    /// The item being dragged
    pub id: String,
    /// Column the item is dropped into
    #[arg(long)]
    pub column: String,
    /// Item the drop landed on; omit to drop on the column surface
    #[arg(long)]
    pub onto: Option<String>,
    /// Which half of the target item the drop landed on
    #[arg(long, value_enum, requires = "onto")]
    pub edge: Option<EdgeArg>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum EdgeArg {
    Top,
    Bottom,
}

impl From<EdgeArg> for ClosestEdge {
    fn from(arg: EdgeArg) -> Self {
        match arg {
            EdgeArg::Top => ClosestEdge::Top,
            EdgeArg::Bottom => ClosestEdge::Bottom,
        }
    }
}

impl Cli {
    #[allow(dead_code)]
    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_help_works() {
        let error = Cli::try_parse_from_args(["taskboard", "--help"]).unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from_args(["taskboard"]).is_err());
    }

    #[test]
    fn test_init_with_columns() {
        let cli = Cli::try_parse_from_args([
            "taskboard", "init", "--name", "Release", "--column", "Backlog", "--column", "Review",
        ])
        .unwrap();
        match cli.command {
            Commands::Init { name, columns, .. } => {
                assert_eq!(name, "Release");
                assert_eq!(columns, vec!["Backlog", "Review"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_column_move_after() {
        let cli =
            Cli::try_parse_from_args(["taskboard", "column", "move", "a", "b", "--after"]).unwrap();
        match cli.command {
            Commands::Column(ColumnCommand::Move {
                dragged,
                target,
                after,
            }) => {
                assert_eq!(dragged, "a");
                assert_eq!(target, "b");
                assert!(after);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_column_add_negative_position() {
        let cli = Cli::try_parse_from_args(["taskboard", "column", "add", "Backlog", "--position", "-1"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Column(ColumnCommand::Add { position: Some(-1), .. })
        ));
    }

    #[test]
    fn test_item_move_onto_item() {
        let cli = Cli::try_parse_from_args([
            "taskboard", "item", "move", "x", "--column", "todo", "--onto", "y", "--edge", "bottom",
        ])
        .unwrap();
        match cli.command {
            Commands::Item(ItemCommand::Move(args)) => {
                assert_eq!(args.id, "x");
                assert_eq!(args.column, "todo");
                assert_eq!(args.onto.as_deref(), Some("y"));
                assert_eq!(args.edge, Some(EdgeArg::Bottom));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_edge_requires_target_item() {
        let result = Cli::try_parse_from_args([
            "taskboard", "item", "move", "x", "--column", "todo", "--edge", "top",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from_args(["taskboard", "show", "--quiet", "--actor", "alice"])
            .unwrap();
        assert!(cli.quiet);
        assert!(!cli.debug);
        assert_eq!(cli.actor.as_deref(), Some("alice"));
    }
}
