use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

use rdkafka::error::KafkaError;
use rdkafka::message::OwnedMessage;
use rdkafka::producer::{FutureProducer, FutureRecord};
use tracing::{info, trace};

use crate::config::KafkaProducerConfig;
use crate::kafka::base_kafka_config;
use crate::kafka::message::TestMessage;

pub struct KafkaSender(FutureProducer);

impl KafkaSender {
    pub fn new(config: &KafkaProducerConfig) -> Result<KafkaSender, KafkaError> {
        let producer = base_kafka_config(&config.broker, config.sasl_enabled).create()?;
        info!(
            "Kafka producer with default topic '{}' initialized successfully",
            config.topic
        );
        Ok(KafkaSender(producer))
    }

    pub async fn send(&self, destination: &str, message: &TestMessage) -> Result<(), KafkaSenderError> {
        trace!("Sending message to {}: {:?}", destination, message);
        let _ = self
            .0
            .send(
                FutureRecord::to(destination)
                    .key(&message.key)
                    .payload(&message.value),
                Duration::from_secs(0),
            )
            .await?;

        Ok(())
    }
}

#[derive(Debug)]
pub enum KafkaSenderError {
    Kafka(KafkaError),
}

impl Error for KafkaSenderError {}

impl From<KafkaError> for KafkaSenderError {
    fn from(e: KafkaError) -> Self {
        KafkaSenderError::Kafka(e)
    }
}

impl From<(KafkaError, OwnedMessage)> for KafkaSenderError {
    fn from(e: (KafkaError, OwnedMessage)) -> Self {
        let (e, _) = e;
        KafkaSenderError::Kafka(e)
    }
}

impl Display for KafkaSenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            KafkaSenderError::Kafka(e) => write!(f, "Failed to send message to kafka: {}", e),
        }
    }
}
