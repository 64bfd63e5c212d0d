use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

// Progress bar style templates as constants
const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";
const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

pub struct ProgressReporter {
    term: Term,
    spinner_position: AtomicUsize,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            spinner_position: AtomicUsize::new(0),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    /// Only report progress when stderr is an interactive terminal
    pub fn for_terminal() -> Option<Self> {
        if Term::stderr().is_term() {
            Some(Self::new())
        } else {
            None
        }
    }

    fn create_progress_bar(&mut self, len: u64, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(len));
        let style = ProgressStyle::default_bar()
            .template(PROGRESS_BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ");
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn create_spinner(&mut self, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new_spinner());
        let mut frames = SPINNER_FRAMES.to_vec();
        frames.push("✓");
        let style = ProgressStyle::default_spinner()
            .template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&frames);
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn next_frame(&self) -> &'static str {
        let pos = self.spinner_position.fetch_add(1, Ordering::Relaxed) % SPINNER_FRAMES.len();
        SPINNER_FRAMES[pos]
    }

    pub fn start_discovery(&mut self) {
        let _ = self.term.clear_line();
        eprintln!("{} Discovering dependency manifests...", style("🔍").cyan());
        let spinner = self.create_spinner("Scanning for manifests...");
        self.current_bar = Some(spinner);
    }

    pub fn checking_manifest(&self, path: &Path) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Found: {}", path.display()));
        } else {
            let _ = self.term.clear_line();
            eprint!(
                "\r{} Found: {}... ",
                style(self.next_frame()).cyan(),
                style(path.display()).dim()
            );
        }
    }

    pub fn finish_discovery(&mut self, count: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        if count == 0 {
            eprintln!("\r{} No manifests found", style("✗").red());
        } else {
            eprintln!(
                "\r{} Discovery complete: found {} {}",
                style("✓").green(),
                style(count).yellow().bold(),
                pluralize("manifest", count)
            );
        }
    }

    pub fn start_graph_building(&mut self, total_manifests: usize) {
        let pb = self.create_progress_bar(total_manifests as u64, "Merging manifests");
        self.current_bar = Some(pb);
    }

    pub fn update_graph_progress(&self, manifest: &Path) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Merging: {}", manifest.display()));
            pb.inc(1);
        }
    }

    pub fn finish_graph_building(&mut self) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_with_message("Graph building complete");
        }
    }

    pub fn start_cycle_analysis(&mut self, total_nodes: usize) {
        eprintln!("\n{} Searching for circular dependencies...", style("🔁").yellow());
        let pb = self.create_progress_bar(total_nodes as u64, "Analyzing nodes");
        self.current_bar = Some(pb);
    }

    pub fn update_analysis_progress(&self, node: &str) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Analyzing: {node}"));
            pb.inc(1);
        }
    }

    pub fn finish_cycle_analysis(&mut self, cyclic_nodes: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        if cyclic_nodes == 0 {
            eprintln!(
                "{} No circular dependencies detected! {}",
                style("✓").green().bold(),
                style("🎉").dim()
            );
        } else {
            eprintln!(
                "{} Found {} {} on circular dependency chains",
                style("⚠").yellow().bold(),
                style(cyclic_nodes).red().bold(),
                pluralize("node", cyclic_nodes)
            );
        }
    }
}
