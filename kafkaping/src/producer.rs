use std::time::Duration;

use rand::{thread_rng, Rng};
use rdkafka::error::KafkaError;
use tracing::{error, info};

use kafkaping_lib::config::KafkaProducerConfig;
use kafkaping_lib::kafka::message::TestMessage;
use kafkaping_lib::kafka::sender::KafkaSender;

const MESSAGE_COUNT: u32 = 10;
const MESSAGE_INTERVAL: Duration = Duration::from_secs(3);

/// Sends ten test messages, one every three seconds. A failed send is
/// logged and the loop moves on to the next index, nothing is retried.
pub async fn run(config: KafkaProducerConfig) -> Result<(), KafkaError> {
    let sender = KafkaSender::new(&config)?;

    for index in 0..MESSAGE_COUNT {
        let message = TestMessage::new(index, thread_rng().gen_range(0..1000));

        match sender.send(&config.topic, &message).await {
            Ok(_) => info!("Message {} sent", index),
            Err(e) => error!("Failed to send message {}: {}", index, e),
        }

        tokio::time::sleep(MESSAGE_INTERVAL).await;
    }

    Ok(())
}
