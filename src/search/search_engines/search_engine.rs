use crate::search::search_engines::{FrontierKind, GraphSearch, SearchLimits};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<A> {
    /// The search was successful. An empty plan means the initial state is
    /// already a goal.
    Success(Vec<A>),
    /// The frontier was exhausted without reaching a goal
    ProvablyUnsolvable,
    /// The search engine hit its expansion limit
    ExpansionLimitExceeded,
    /// The search engine ran out of time
    TimeLimitExceeded,
    /// The search engine ran out of memory
    MemoryLimitExceeded,
}

impl<A> SearchResult<A> {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    pub fn plan(&self) -> Option<&[A]> {
        match self {
            SearchResult::Success(plan) => Some(plan),
            _ => None,
        }
    }

    /// The plan, or an empty sequence if the search did not succeed.
    pub fn into_plan(self) -> Vec<A> {
        match self {
            SearchResult::Success(plan) => plan,
            _ => vec![],
        }
    }
}

/// When the goal test runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalTest {
    /// After a node is popped, before it is expanded. Needed by the cost
    /// based searches: a popped node already carries its optimal cost.
    OnExpansion,
    /// As soon as a successor is discovered. Breadth-first search finds the
    /// shallowest goal this way without expanding one more layer.
    OnGeneration,
}

/// How a successor that is already registered is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Only the first discovery of a state counts; its parent edge is never
    /// overwritten.
    FirstDiscovery,
    /// A strictly cheaper path to a state that has not been expanded yet
    /// replaces its parent edge and lowers its frontier priority.
    BestCost,
}

/// Everything that distinguishes one traversal from another. The search
/// loop itself is shared, see [`GraphSearch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStrategy {
    pub frontier: FrontierKind,
    pub goal_test: GoalTest,
    pub duplicates: DuplicatePolicy,
    /// Whether the heuristic contributes to frontier priorities.
    pub informed: bool,
}

impl SearchStrategy {
    pub const DEPTH_FIRST: Self = Self {
        frontier: FrontierKind::Lifo,
        goal_test: GoalTest::OnExpansion,
        duplicates: DuplicatePolicy::FirstDiscovery,
        informed: false,
    };

    pub const BREADTH_FIRST: Self = Self {
        frontier: FrontierKind::Fifo,
        goal_test: GoalTest::OnGeneration,
        duplicates: DuplicatePolicy::FirstDiscovery,
        informed: false,
    };

    pub const UNIFORM_COST: Self = Self {
        frontier: FrontierKind::Priority,
        goal_test: GoalTest::OnExpansion,
        duplicates: DuplicatePolicy::BestCost,
        informed: false,
    };

    pub const ASTAR: Self = Self {
        frontier: FrontierKind::Priority,
        goal_test: GoalTest::OnExpansion,
        duplicates: DuplicatePolicy::BestCost,
        informed: true,
    };
}

#[derive(clap::ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Depth-first search, no optimality guarantee.")]
    Dfs,
    #[clap(help = "Breadth-first search, optimal for unit step costs.")]
    Bfs,
    #[clap(help = "Uniform-cost search, optimal for non-negative step costs.")]
    Ucs,
    #[clap(help = "A* search, optimal with an admissible heuristic.")]
    Astar,
}

impl SearchEngineName {
    pub fn strategy(&self) -> SearchStrategy {
        match self {
            SearchEngineName::Dfs => SearchStrategy::DEPTH_FIRST,
            SearchEngineName::Bfs => SearchStrategy::BREADTH_FIRST,
            SearchEngineName::Ucs => SearchStrategy::UNIFORM_COST,
            SearchEngineName::Astar => SearchStrategy::ASTAR,
        }
    }

    pub fn create(&self, limits: SearchLimits) -> GraphSearch {
        GraphSearch::new(self.strategy(), limits)
    }
}
