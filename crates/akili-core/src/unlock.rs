use akili_config::CourseModule;
use std::collections::BTreeSet;

/// Whether the module at `index` is open to the learner.
///
/// Index 0 is always open. Any later module opens exactly when its immediate
/// predecessor in track order has been recorded complete; overall progress
/// percentage plays no part in the decision.
///
/// `index` must be within `modules`; an out-of-range index is a bug at the
/// call site.
#[must_use]
pub fn is_unlocked(modules: &[CourseModule], completed: &BTreeSet<String>, index: usize) -> bool {
    index == 0 || completed.contains(&modules[index - 1].id)
}

/// Index of the first module the learner has not completed yet, if any.
#[must_use]
pub fn first_incomplete(modules: &[CourseModule], completed: &BTreeSet<String>) -> Option<usize> {
    modules.iter().position(|module| !completed.contains(&module.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modules() -> Vec<CourseModule> {
        ["m1", "m2", "m3"]
            .into_iter()
            .map(|id| CourseModule {
                id: id.to_owned(),
                title: id.to_uppercase(),
                description: String::new(),
                content: "content".to_owned(),
                has_project: false,
            })
            .collect()
    }

    #[test]
    fn test_first_module_is_always_unlocked() {
        let modules = modules();
        assert!(is_unlocked(&modules, &BTreeSet::new(), 0));
        let completed = BTreeSet::from(["m3".to_owned()]);
        assert!(is_unlocked(&modules, &completed, 0));
    }

    #[test]
    fn test_unlock_depends_only_on_immediate_predecessor() {
        let modules = modules();
        let mut completed = BTreeSet::new();
        assert!(!is_unlocked(&modules, &completed, 1));
        assert!(!is_unlocked(&modules, &completed, 2));

        completed.insert("m1".to_owned());
        assert!(is_unlocked(&modules, &completed, 1));
        assert!(!is_unlocked(&modules, &completed, 2));

        // Completing m2 alone opens m3 even if m1 were somehow missing.
        let only_m2 = BTreeSet::from(["m2".to_owned()]);
        assert!(is_unlocked(&modules, &only_m2, 2));
    }

    #[test]
    fn test_first_incomplete() {
        let modules = modules();
        assert_eq!(first_incomplete(&modules, &BTreeSet::new()), Some(0));
        let completed = BTreeSet::from(["m1".to_owned(), "m2".to_owned()]);
        assert_eq!(first_incomplete(&modules, &completed), Some(2));
        let all = BTreeSet::from(["m1".to_owned(), "m2".to_owned(), "m3".to_owned()]);
        assert_eq!(first_incomplete(&modules, &all), None);
    }
}
