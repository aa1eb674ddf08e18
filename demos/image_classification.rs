//! Image classification example
//!
//! Local image files and image URLs are detected automatically and sent as
//! base64; they can be mixed freely with text in a single request.
//!
//! Usage:
//!   CLASSIFAI_API_KEY=your_key cargo run --example image_classification -- photo.jpg

use classifai::prelude::*;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let image = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("photo.jpg"));

    let client = ClassifAiClient::new()?;

    println!("Example 1: Single image from file");
    let result = client
        .classify(
            image.as_path(),
            ClassifyOptions::new().labels(["cat", "dog", "bird", "other"]),
        )
        .await?;
    println!("Label: {} ({:?})\n", result.label, result.confidence());

    println!("Example 2: Image from URL");
    match client
        .classify(
            "https://example.com/product-image.jpg",
            ClassifyOptions::new().labels(["damaged", "good_condition", "new"]),
        )
        .await
    {
        Ok(result) => println!("Label: {}\n", result.label),
        Err(Error::ContentFetch { source_ref, message, .. }) => {
            println!("Could not download {source_ref}: {message}\n")
        }
        Err(err) => return Err(err.into()),
    }

    println!("Example 3: Support ticket with screenshot");
    let content = Content::new()
        .push("User reported: Getting error 500 when trying to checkout")
        .push(image.as_path());
    let result = client
        .classify(
            content,
            ClassifyOptions::new().labels([
                "bug_report",
                "feature_request",
                "user_error",
                "billing_issue",
            ]),
        )
        .await?;
    println!("Route to: {}", result.label);
    println!("Detection ID: {}\n", result.detection_id);

    println!("Example 4: Pre-encoded image");
    let bytes = std::fs::read(&image)?;
    let result = client
        .classify(
            vec![
                ContentItem::text("Product photo submitted by seller"),
                ContentItem::image_bytes(&bytes),
            ],
            ClassifyOptions::new().labels(["acceptable", "blurry", "inappropriate"]),
        )
        .await?;
    println!("Label: {}", result.label);

    println!("\nExample 5: Inspect normalized content without sending it");
    let path = image.display().to_string();
    for item in client.normalize(vec!["caption text", path.as_str()]).await? {
        println!("  {} ({} bytes of payload)", item.kind().as_str(), item.payload().len());
    }

    Ok(())
}
