use std::collections::HashSet;

/// Partition of untracked paths into individual files and top-level folder
/// prefixes, flattened into a single `git add` invocation and discarded.
#[derive(Debug, Default)]
pub struct StagingPlan {
    files: Vec<String>,
    folders: HashSet<String>,
}

impl StagingPlan {
    /// Builds a plan from the output of `git ls-files --others
    /// --exclude-standard`, one path per line.
    ///
    /// Blank lines are skipped. A path counts as living in a folder only
    /// when the separator appears past position zero; the whole folder is
    /// then staged once through its `dir/` prefix. No ordering is
    /// guaranteed among folder prefixes.
    pub fn from_listing(listing: &str) -> Self {
        let mut plan = StagingPlan::default();

        for line in listing.lines() {
            let path = line.trim();
            if path.is_empty() {
                continue;
            }

            match path.find('/') {
                Some(idx) if idx > 0 => {
                    plan.folders.insert(path[..=idx].to_string());
                }
                _ => plan.files.push(path.to_string()),
            }
        }

        plan
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.folders.is_empty()
    }

    /// Paths to hand to `git add`: files first, then folder prefixes.
    pub fn paths(&self) -> Vec<String> {
        let mut paths = self.files.clone();
        paths.extend(self.folders.iter().cloned());
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partitions_files_and_collapses_folders() {
        let plan = StagingPlan::from_listing("a.txt\ndir/b.txt\ndir/c.txt\n\n");

        let staged: HashSet<String> = plan.paths().into_iter().collect();
        let expected: HashSet<String> =
            ["a.txt", "dir/"].into_iter().map(String::from).collect();
        assert_eq!(staged, expected);
    }

    #[test]
    fn skips_blank_and_whitespace_lines() {
        let plan = StagingPlan::from_listing("\n   \n\t\nnotes.md\n");

        assert_eq!(plan.paths(), vec!["notes.md"]);
    }

    #[test]
    fn a_leading_separator_is_not_a_folder_marker() {
        let plan = StagingPlan::from_listing("/odd.txt");

        assert_eq!(plan.paths(), vec!["/odd.txt"]);
    }

    #[test]
    fn lists_files_before_folder_prefixes() {
        let plan = StagingPlan::from_listing("x/1.txt\na.txt\ny/2.txt\nb.txt");

        let paths = plan.paths();
        assert_eq!(&paths[..2], &["a.txt", "b.txt"]);

        let folders: HashSet<&str> = paths[2..].iter().map(String::as_str).collect();
        assert_eq!(folders, ["x/", "y/"].into_iter().collect());
    }

    #[test]
    fn deeply_nested_paths_collapse_to_the_top_level_folder() {
        let plan = StagingPlan::from_listing("src/core/deep/file.rs");

        assert_eq!(plan.paths(), vec!["src/"]);
    }

    #[test]
    fn empty_listing_yields_an_empty_plan() {
        assert!(StagingPlan::from_listing("").is_empty());
    }
}
