use quadview_client::ClientConfig;
use quadview_view::ViewConfig;

/// Holds the configuration for a quadview web server.
pub struct ServerConfig {
    /// The IP address and port the socket binds to.
    pub bind: String,
    /// Whether CORS is enabled.
    pub cors: bool,
    /// Configuration of the presentation-tree transform.
    pub view: ViewConfig,
    /// Configuration of the SPARQL endpoint client.
    pub client: ClientConfig,
}
