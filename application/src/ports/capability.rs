//! Capability tool port

use async_trait::async_trait;
use tourmate_domain::{Capability, ToolReply};

/// Invokes a capability tool with a bare place name.
///
/// Infallible by contract: adapters absorb geocoding and lookup failures
/// and express them as [`ToolReply`] variants, so network errors never
/// cross the tool boundary. Implementations must be safe for concurrent
/// use; the shared state is limited to HTTP clients and the geocoding
/// pacing gate.
#[async_trait]
pub trait CapabilityPort: Send + Sync {
    async fn invoke(&self, capability: Capability, place: &str) -> ToolReply;
}
