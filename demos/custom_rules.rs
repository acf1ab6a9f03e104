//! Custom rule configuration example using the builder

use subject_classifier::ClassifierBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔧 Subject Classifier - Custom Rules Example\n");

    // Rule order is scoring order: earlier rules win score ties.
    let classifier = ClassifierBuilder::new()
        .keywords(
            "8110".to_string(),
            vec![
                "software".to_string(),
                "license".to_string(),
                "saas".to_string(),
            ],
        )
        .keywords(
            "7310".to_string(),
            vec![
                "hotel".to_string(),
                "flight".to_string(),
                "train".to_string(),
            ],
        )
        .exact("github".to_string(), "8110".to_string())
        .build()?;

    let memos = [
        "Annual SaaS license renewal",
        "Hotel for the conference trip",
        "GitHub",
        "Office plants",
    ];

    for memo in memos {
        let result = classifier.classify(memo)?;
        println!(
            "  ✓ {} -> {} (confidence {:.2})",
            memo, result.subject_code, result.confidence
        );
    }

    Ok(())
}
