use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// # Error Categories
///
/// ## Traversal Errors
/// - [`Error::UnknownStartNode`] - A traversal was asked to start from a node the graph does not contain
/// - [`Error::NotImplemented`] - A traversal mode that has no defined semantics was requested
/// - [`Error::GraphError`] - Graph construction failed (e.g. an edge endpoint does not exist)
///
/// ## Document Errors
/// - [`Error::Malformed`] - The substation document is structurally invalid
/// - [`Error::Xml`] / [`Error::XmlAttribute`] - The XML reader rejected the input
/// - [`Error::FileError`] - Filesystem I/O errors
///
/// ## Analysis Errors
/// - [`Error::UnknownEquipment`] - A named start point could not be found in the topology
///
/// # Examples
///
/// ```rust,no_run
/// use gridwalk::{Error, scl::SclDocument};
/// use std::path::Path;
///
/// match SclDocument::from_file(Path::new("station.scd")) {
///     Ok(doc) => println!("{} substations", doc.substations().len()),
///     Err(Error::Malformed { message, file, line }) => {
///         eprintln!("Malformed document: {} ({}:{})", message, file, line);
///     }
///     Err(Error::FileError(io_err)) => eprintln!("I/O error: {}", io_err),
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    // Traversal Errors
    /// A traversal start node is not part of the graph.
    ///
    /// This is a configuration error: the caller asked for a walk from a point
    /// that does not exist. The whole traversal call is void; no partial
    /// visit order or parent map is returned.
    #[error("Graph does not have node: {0}")]
    UnknownStartNode(String),

    /// The requested operation has no defined semantics yet.
    ///
    /// Returned for post-order traversal requests. The associated value
    /// names the unsupported capability.
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    /// Graph construction error.
    ///
    /// Raised when an edge refers to a node that does not exist in the
    /// graph it is being added to.
    #[error("{0}")]
    GraphError(String),

    // Document Errors
    /// The document is damaged and could not be interpreted.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// Error reported by the XML reader.
    #[error("{0}")]
    Xml(#[from] quick_xml::Error),

    /// An XML attribute could not be decoded.
    #[error("{0}")]
    XmlAttribute(#[from] quick_xml::events::attributes::AttrError),

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur while reading a document
    /// from disk.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    // Analysis Errors
    /// A named piece of equipment, bus or transformer does not exist in the
    /// topology (or has no terminal to start a traversal from).
    #[error("Unknown equipment - {0}")]
    UnknownEquipment(String),
}
