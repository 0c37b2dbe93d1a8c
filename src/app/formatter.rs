use crate::app::models::VaultEntry;
use crate::filter::FilterStats;
use std::collections::HashSet;

pub struct OutputGenerator;

impl OutputGenerator {
    /// Excluded entries are drawn only when `show_excluded` is set, except for
    /// excluded folders that still hold included entries.
    pub fn generate_tree(entries: &[VaultEntry], show_excluded: bool) -> String {
        let mut output = String::new();
        let ancestors = Self::included_ancestors(entries);

        for entry in entries {
            let visible = show_excluded
                || entry.decision.included
                || (entry.is_dir && ancestors.contains(entry.relative_path.as_str()));
            if !visible {
                continue;
            }

            let indent = "    ".repeat(entry.depth.saturating_sub(1));
            let name = entry.path.file_name().unwrap_or_default().to_string_lossy();
            let marker = if entry.is_dir { "/" } else { "" };
            output.push_str(&format!(
                "{}{}{}  {}\n",
                indent,
                name,
                marker,
                Self::decision_tag(entry)
            ));
        }

        output.trim_end().to_string()
    }

    /// Relative paths of every folder above an included entry.
    fn included_ancestors(entries: &[VaultEntry]) -> HashSet<&str> {
        let mut ancestors = HashSet::new();
        for entry in entries.iter().filter(|e| e.decision.included) {
            let path = entry.relative_path.as_str();
            for (idx, _) in path.match_indices('/') {
                ancestors.insert(&path[..idx]);
            }
        }
        ancestors
    }

    fn decision_tag(entry: &VaultEntry) -> String {
        if !entry.decision.included {
            return "[excluded]".to_string();
        }
        let scopes: Vec<&str> = [
            (entry.decision.inline, "inline"),
            (entry.decision.file, "file"),
        ]
        .into_iter()
        .filter_map(|(on, label)| on.then_some(label))
        .collect();
        if scopes.is_empty() {
            return "[included]".to_string();
        }
        format!("[{}]", scopes.join(" "))
    }

    pub fn generate_summary(entries: &[VaultEntry]) -> String {
        let files = entries.iter().filter(|e| !e.is_dir);
        let (included, excluded) = files.fold((0usize, 0usize), |(inc, exc), e| {
            if e.decision.included {
                (inc + 1, exc)
            } else {
                (inc, exc + 1)
            }
        });
        format!("{} files included, {} excluded", included, excluded)
    }

    pub fn format_stats(stats: &FilterStats) -> String {
        format!(
            "<filter_stats enabled=\"{}\" rules=\"{}\" cached=\"{}\"/>",
            stats.enabled, stats.rules_count, stats.cache_size
        )
    }

    pub fn format_full_output(tree: &str, summary: &str, stats: Option<&str>) -> String {
        let mut out = String::from("<directory_structure>\n");
        out.push_str(tree);
        out.push_str("\n</directory_structure>\n");
        out.push_str(summary);

        if let Some(stats) = stats {
            out.push('\n');
            out.push_str(stats);
        }

        out
    }
}
