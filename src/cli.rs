use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, FormatArgs, NodeDisplayArgs};

#[derive(Parser)]
#[command(
    name = "depcircle",
    about = "🔁 Rank components by the circular dependency chains running through them",
    long_about = "depcircle reads component dependency manifests, searches every component for \
                  dependency chains that lead back to it, and ranks the components by how \
                  entangled they are. Components on the most (and longest) chains are listed \
                  first.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank every component by its circular dependency chains
    ///
    /// Builds the dependency graph from the given manifests, runs a
    /// depth-bounded cycle search from every component, and prints the
    /// components ordered by circular dependency count.
    #[command(
        long_about = "Analyze all components for circular dependencies. Manifests are read from \
                      the given files, or discovered under the given directories, and merged \
                      into one dependency graph. Every component is searched for chains that \
                      lead back to it, up to --max-depth levels deep. The report lists the \
                      components with the highest circular dependency count first; ties are \
                      ordered by name."
    )]
    Inspect {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        node_display: NodeDisplayArgs,

        /// Exit with error code if circular dependencies are found
        #[arg(long, env = "DEPCIRCLE_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    /// Show the circular dependency chains of a single component
    ///
    /// Runs the cycle search for one component only. Useful for working out
    /// why a particular component shows up near the top of the ranking.
    #[command(
        long_about = "Analyze circular dependencies through a specific component. The graph is \
                      built exactly as for 'inspect', but only the named component is searched, \
                      and every chain leading back to it is printed. A component that does not \
                      appear in the graph has no dependencies and therefore no chains."
    )]
    Spotlight {
        /// Name of the component to analyze
        #[arg(value_name = "NODE", env = "DEPCIRCLE_NODE")]
        node: String,

        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Junit,
    #[value(name = "github")]
    GitHub,
}
