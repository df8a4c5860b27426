use rdkafka::config::RDKafkaLogLevel;
use rdkafka::ClientConfig;

use crate::config::BrokerUrl;

pub mod listener;
pub mod message;
pub mod sender;

fn base_kafka_config(broker: &BrokerUrl, sasl_enabled: bool) -> ClientConfig {
    let mut config = ClientConfig::new();
    config
        .set("bootstrap.servers", broker.bootstrap_servers())
        .set_log_level(RDKafkaLogLevel::Debug);

    if sasl_enabled {
        config
            .set("security.protocol", "SASL_PLAINTEXT")
            .set("sasl.mechanism", "SCRAM-SHA-512")
            .set("sasl.username", broker.username.as_str())
            .set("sasl.password", broker.password.as_str());
    }

    config
}
