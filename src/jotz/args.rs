use clap::{Parser, Subcommand};

/// Returns the version string, including git hash and commit date for dev builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "jotz", bin_name = "jotz", version = get_version())]
#[command(about = "Tiny local-first note keeper for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "n", display_order = 1)]
    New {
        /// Title of the note (optional, opens editor if not provided)
        #[arg(required = false)]
        title: Option<String>,

        /// Content of the note
        #[arg(required = false)]
        content: Option<String>,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// List notes
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Only notes whose title or content contains TERM
        #[arg(short, long, value_name = "TERM")]
        search: Option<String>,
    },

    /// Print a note in full
    #[command(alias = "v", display_order = 3)]
    View {
        /// List position of the note (defaults to the selected one)
        #[arg(required = false)]
        index: Option<usize>,
    },

    /// Edit a note in the editor
    #[command(alias = "e", display_order = 4)]
    Edit {
        /// List position of the note
        index: usize,
    },

    /// Delete a note
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// List position of the note
        index: usize,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Browse notes interactively (the default when no command is given)
    #[command(alias = "b", display_order = 6)]
    Browse,

    /// Print the path of the notes file
    #[command(display_order = 7)]
    Path,
}
