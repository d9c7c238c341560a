//! Branch plan built up while the workflow runs

use tb_client::ResolvedTitle;

/// A 1-based choice into the configured base branch list
///
/// `0` and anything past the end of the list are out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseBranchChoice(usize);

impl BaseBranchChoice {
    pub fn new(number: usize) -> Self {
        Self(number)
    }

    pub fn number(self) -> usize {
        self.0
    }

    /// The chosen branch, unless the choice is out of range or names an empty entry
    pub fn resolve(self, branches: &[String]) -> Option<&str> {
        let index = self.0.checked_sub(1)?;
        branches
            .get(index)
            .map(|branch| branch.trim())
            .filter(|branch| !branch.is_empty())
    }
}

/// Everything collected for one branch creation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchPlan {
    pub ticket: Option<String>,
    pub title: Option<ResolvedTitle>,
    pub branch_name: Option<String>,
    pub base_branch: Option<String>,
}

/// A complete plan, ready to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyPlan {
    pub branch_name: String,
    pub base_branch: String,
}

impl BranchPlan {
    /// Text to seed the branch name prompt with
    ///
    /// A name already entered wins over the resolved title, which wins over
    /// the raw ticket.
    pub fn branch_name_seed(&self) -> String {
        self.branch_name
            .clone()
            .or_else(|| self.title.as_ref().map(|t| t.as_str().to_string()))
            .or_else(|| self.ticket.clone())
            .unwrap_or_default()
    }

    /// Take the plan for execution, leaving an empty one behind
    pub fn take_ready(&mut self) -> Option<ReadyPlan> {
        let plan = std::mem::take(self);
        Some(ReadyPlan {
            branch_name: plan.branch_name?,
            base_branch: plan.base_branch?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branches() -> Vec<String> {
        vec!["development".into(), "master".into(), "".into()]
    }

    #[test]
    fn test_choice_is_one_based() {
        let branches = branches();
        assert_eq!(BaseBranchChoice::new(1).resolve(&branches), Some("development"));
        assert_eq!(BaseBranchChoice::new(2).resolve(&branches), Some("master"));
        assert_eq!(BaseBranchChoice::new(0).resolve(&branches), None);
        assert_eq!(BaseBranchChoice::new(4).resolve(&branches), None);
    }

    #[test]
    fn test_empty_entry_is_invalid() {
        assert_eq!(BaseBranchChoice::new(3).resolve(&branches()), None);
    }

    #[test]
    fn test_branch_name_seed_precedence() {
        let mut plan = BranchPlan {
            ticket: Some("ABC-42".into()),
            ..Default::default()
        };
        assert_eq!(plan.branch_name_seed(), "ABC-42");

        plan.title = Some(ResolvedTitle::Matched("ABC-42-fix-crash".into()));
        assert_eq!(plan.branch_name_seed(), "ABC-42-fix-crash");

        plan.branch_name = Some("ABC-42-my-name".into());
        assert_eq!(plan.branch_name_seed(), "ABC-42-my-name");
    }

    #[test]
    fn test_take_ready_consumes_the_plan() {
        let mut plan = BranchPlan {
            ticket: Some("ABC-42".into()),
            title: None,
            branch_name: Some("ABC-42-x".into()),
            base_branch: Some("master".into()),
        };
        assert_eq!(
            plan.take_ready(),
            Some(ReadyPlan {
                branch_name: "ABC-42-x".into(),
                base_branch: "master".into(),
            })
        );
        assert_eq!(plan, BranchPlan::default());
        assert_eq!(plan.take_ready(), None);
    }
}
