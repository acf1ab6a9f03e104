//! Basic classification example using the built-in tables

use subject_classifier::create_default_classifier;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Subject Classifier - Basic Example\n");

    let classifier = create_default_classifier();

    let memos = [
        "タクシーで客先へ移動",
        "インターネット料金の支払い",
        "JR東日本",
        "月次の給与振込",
        "不明な入出金",
    ];

    println!("📋 Classifying transaction memos...\n");

    for memo in memos {
        let result = classifier.classify(memo)?;
        println!(
            "  ✓ {} -> {} (confidence {:.2}, matched {:?})",
            memo, result.subject_code, result.confidence, result.matched_keywords
        );
    }

    Ok(())
}
