use super::*;

#[test]
fn pseudo_sources_are_interactive() {
    let tmp = Path::new("/tmp");
    for name in ["<stdin>", "<string>", "<ipython-input-5-9043666a436b>", ""] {
        assert_eq!(classify_source_in(name, tmp), CallerSource::Interactive, "{name}");
    }
}

#[test]
fn kernel_cells_under_temp_are_interactive() {
    let tmp = Path::new("/tmp");
    assert_eq!(
        classify_source_in("/tmp/ipykernel_255368/2963069196.py", tmp),
        CallerSource::Interactive
    );
}

#[test]
fn kernel_like_dirs_elsewhere_are_files() {
    let tmp = Path::new("/tmp");
    let name = "/home/me/ipykernel_1/cell.py";
    assert_eq!(
        classify_source_in(name, tmp),
        CallerSource::File(PathBuf::from(name))
    );
}

#[test]
fn scripts_are_files() {
    let tmp = Path::new("/tmp");
    assert_eq!(
        classify_source_in("scripts/plot_losses.py", tmp),
        CallerSource::File(PathBuf::from("scripts/plot_losses.py"))
    );
}

#[test]
fn static_caller_from_source() {
    assert_eq!(StaticCaller::from_source("<stdin>").caller_path(1), None);
    assert_eq!(
        StaticCaller::from_source("run.py").caller_path(1),
        Some(PathBuf::from("run.py"))
    );
}

#[test]
fn closures_are_caller_contexts() {
    let ctx = |skip: usize| (skip == 2).then(|| PathBuf::from("deep.rs"));
    assert_eq!(ctx.caller_path(1), None);
    assert_eq!(ctx.caller_path(2), Some(PathBuf::from("deep.rs")));
}

#[test]
fn executable_caller_reports_current_exe() {
    let path = ExecutableCaller.caller_path(1);
    assert_eq!(path, std::env::current_exe().ok());
}

fn hist(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

#[test]
fn last_runfile_takes_most_recent_entry() {
    let h = hist(&[
        "runfile('/work/first.py', wdir='/work')",
        "x = 1",
        "runfile(\"/work/second.py\", wdir=\"/work\")",
        "savefigs()",
    ]);
    assert_eq!(last_runfile(&h), Some(PathBuf::from("/work/second.py")));
}

#[test]
fn last_runfile_accepts_missing_wdir_and_ignores_other_commands() {
    assert_eq!(
        last_runfile(&hist(&["runfile('plots.py')"])),
        Some(PathBuf::from("plots.py"))
    );
    assert_eq!(last_runfile(&hist(&["%run plots.py", "print('runfile(')"])), None);
    assert_eq!(last_runfile(&[]), None);
}

#[test]
fn history_caller_names_runfile_script_for_interactive_source() {
    let caller = HistoryCaller::new(
        "<ipython-input-4-abc>",
        hist(&["runfile('/work/analysis.py', wdir='/work')", "savefigs(dir='out')"]),
    );
    assert_eq!(caller.caller_path(1), Some(PathBuf::from("/work/analysis.py")));
}

#[test]
fn history_caller_requires_export_call_last() {
    let caller = HistoryCaller::new(
        "<stdin>",
        hist(&["runfile('/work/analysis.py', wdir='/work')", "plt.show()"]),
    );
    assert_eq!(caller.caller_path(1), None);
    assert_eq!(HistoryCaller::new("<stdin>", Vec::new()).caller_path(1), None);
}

#[test]
fn history_caller_prefers_real_source_file() {
    let caller = HistoryCaller::new(
        "/work/script.py",
        hist(&["runfile('/work/other.py')", "savefigs()"]),
    );
    assert_eq!(caller.caller_path(1), Some(PathBuf::from("/work/script.py")));
}
