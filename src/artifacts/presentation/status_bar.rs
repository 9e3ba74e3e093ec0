use crate::artifacts::probe::info::Info;

const BRANCH_ICON: &str = "$(git-branch)";

/// Status bar item showing the branch of the working copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchIndicator {
    Visible(String),
    Hidden,
}

impl BranchIndicator {
    pub fn from_info(info: Option<&Info>) -> Self {
        match info {
            Some(info) => BranchIndicator::Visible(format!("{} {}", BRANCH_ICON, info.branch)),
            None => BranchIndicator::Hidden,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            BranchIndicator::Visible(text) => Some(text),
            BranchIndicator::Hidden => None,
        }
    }
}
