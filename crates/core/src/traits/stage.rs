//! The closed sum of stage kinds, modeled as a uniform trait rather than
//! dynamic-dispatch "agents" (spec.md §9 "Dynamic dispatch over agents").
//! The orchestrator drives implementors in a fixed array order; stages
//! never throw, and never emit streaming updates themselves — that is the
//! orchestrator's job.

use async_trait::async_trait;

use crate::context::{RequestContext, StageId};

#[async_trait]
pub trait Stage: Send + Sync + 'static {
    /// Run this stage, mutating and returning the context. Must never
    /// panic or propagate an error: internal failures are caught and
    /// folded into `ctx.errors` before returning.
    async fn run(&self, ctx: RequestContext) -> RequestContext;

    fn id(&self) -> StageId;

    fn name(&self) -> &'static str {
        self.id().as_str()
    }
}
