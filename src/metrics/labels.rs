//! Label types for Prometheus metrics

use prometheus_client::encoding::EncodeLabelSet;

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct ConnectionLabels {
    pub connection: String,
}

impl ConnectionLabels {
    pub fn new(connection: &str) -> Self {
        Self {
            connection: connection.to_string(),
        }
    }
}
