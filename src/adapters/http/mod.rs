//! Challenge service adapters. Implement ChallengeGateway over HTTP or in memory.

pub mod mock_gateway;
pub mod webhook_api;

pub use mock_gateway::MockChallengeGateway;
pub use webhook_api::HttpChallengeGateway;
