//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Choosing the progress listener for the current output mode
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Deploy summary rendering
//!
//! ## Usage
//!
//! ```ignore
//! use artifact_deployer::presentation::factory;
//!
//! let use_case = factory::create_deploy_use_case(factory::create_transformation(true, true));
//! use_case.deploy(&source, &mut artifact, &remote, &local, Some(&session))?;
//! ```

pub mod factory;
pub mod output;

pub use factory::{create_deploy_use_case, create_transfer_listener, create_transformation};
pub use output::DeploySummary;
