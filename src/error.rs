//! Errors raised while building the hex network from its node list.

/// Invalid node configuration handed to the network at mount time.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
	/// Two nodes share the same identifier.
	#[error("Duplicate node id: {0}")]
	DuplicateNode(String),

	/// A referenced node id does not exist.
	#[error("Unknown node id: {0}")]
	UnknownNode(String),
}
