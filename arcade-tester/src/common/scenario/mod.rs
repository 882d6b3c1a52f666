use anyhow::Result;

pub mod browsing;
pub mod property;
pub mod registry;

pub use registry::{expand_scenarios, get_scenario, list_scenarios};

/// Inputs shared by every scenario run.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioCtx<'a> {
    pub catalog_json: &'a str,
    pub seed: u64,
    pub verbose: bool,
}

type ScenarioFn = fn(&ScenarioCtx<'_>) -> Result<()>;

#[derive(Clone, Copy)]
pub struct TestScenario {
    pub key: &'static str,
    pub description: &'static str,
    run: ScenarioFn,
}

impl TestScenario {
    pub const fn new(key: &'static str, description: &'static str, run: ScenarioFn) -> Self {
        Self {
            key,
            description,
            run,
        }
    }

    pub fn run(&self, ctx: &ScenarioCtx<'_>) -> Result<()> {
        (self.run)(ctx)
    }
}

impl std::fmt::Debug for TestScenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestScenario")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
