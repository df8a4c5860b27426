use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::error::KafkaError;
use rdkafka::{Offset, TopicPartitionList};
use tracing::info;

use crate::config::KafkaConsumerConfig;
use crate::kafka::base_kafka_config;

// hand messages over as soon as a single byte is buffered, and cap one
// fetch at 1MB
const FETCH_MIN_BYTES: &str = "1";
const FETCH_MESSAGE_MAX_BYTES: &str = "1000000";

pub fn new_listener(config: &KafkaConsumerConfig) -> Result<StreamConsumer, KafkaError> {
    let consumer: StreamConsumer = base_kafka_config(&config.broker, config.sasl_enabled)
        .set("group.id", config.group_id.as_str())
        .set("auto.offset.reset", "earliest")
        .set("allow.auto.create.topics", "true")
        .set("fetch.min.bytes", FETCH_MIN_BYTES)
        .set("fetch.message.max.bytes", FETCH_MESSAGE_MAX_BYTES)
        .create()?;

    let mut assignment = TopicPartitionList::new();
    assignment.add_partition_offset(&config.topic, config.partition, Offset::Stored)?;
    consumer.assign(&assignment)?;

    info!(
        "Kafka consumer connected to topic '{}' partition {} initialized successfully",
        config.topic, config.partition
    );

    Ok(consumer)
}
