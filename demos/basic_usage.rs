//! Basic usage example
//!
//! Text classification with explicit labels, label inference from a
//! description, ground-truth feedback and project statistics.
//!
//! The API key is read from CLASSIFAI_API_KEY.
//!
//! Usage:
//!   CLASSIFAI_API_KEY=your_key cargo run --example basic_usage

use classifai::prelude::*;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if std::env::var("CLASSIFAI_API_KEY").is_err() {
        eprintln!("Warning: CLASSIFAI_API_KEY not set. Requests will be sent without credentials.");
    }

    let client = ClassifAiClient::new()?;

    println!("Example 1: Simple text classification");
    let result = client
        .classify(
            "This product exceeded my expectations!",
            ClassifyOptions::new().labels(["positive", "negative", "neutral"]),
        )
        .await?;
    println!("Label: {}", result.label);
    for (label, score) in result.ranked() {
        println!("  {label:<10} {score:.3}");
    }
    println!("Detection ID: {}\n", result.detection_id);

    println!("Example 2: Multiple text items analyzed together");
    let result = client
        .classify(
            vec!["Great product!", "Fast shipping", "Highly recommend"],
            ClassifyOptions::new().labels(["positive", "negative", "neutral"]),
        )
        .await?;
    if let Some(confidence) = result.confidence() {
        println!("Label: {} ({:.2}%)\n", result.label, confidence * 100.0);
    }

    println!("Example 3: Automatic label inference");
    let result = client
        .classify(
            "The pasta was cold and the waiter was rude",
            ClassifyOptions::new().description("Restaurant reviews from customers"),
        )
        .await?;
    println!("Inferred labels: {:?}", result.labels_used);
    println!("Label: {}\n", result.label);

    println!("Example 4: Submit feedback");
    let result = client
        .classify(
            "Click here to claim your prize!",
            ClassifyOptions::new().labels(["spam", "not_spam"]),
        )
        .await?;
    println!("Predicted: {}", result.label);
    let feedback = client.submit_feedback(&result.detection_id, "spam").await?;
    println!("Feedback recorded: {} ({})\n", feedback.success, feedback.message);

    println!("Example 5: Project statistics");
    let stats = client.get_project_stats(&result.project_id).await?;
    println!("Total classifications: {}", stats.total_classifications);
    println!("Accuracy: {:.1}%", stats.accuracy_rate * 100.0);
    println!("Label distribution: {:?}\n", stats.label_distribution);

    println!("Example 6: Reusing project labels");
    let follow_up = client
        .classify(
            "Totally legit offer, wire money now",
            ClassifyOptions::new().project_id(&result.project_id),
        )
        .await?;
    println!("Label: {}", follow_up.label);

    match client.get_project_stats("no-such-project").await {
        Err(Error::NotFound { message, .. }) => println!("Unknown project: {message}"),
        Err(err) => return Err(err.into()),
        Ok(stats) => println!("Unexpected stats: {stats:?}"),
    }

    Ok(())
}
