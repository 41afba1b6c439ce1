use jsonnlp_canonical::Canonicalizer;
use serde_json::json;

fn main() {
    let canonicalizer = Canonicalizer::new();
    let skeleton = json!({
        "meta": {"DC.conformsTo": "0.7", "DC.title": "", "counts": {}},
        "conll": {},
        "documents": [{
            "id": 0,
            "text": "The dog barked.",
            "tokenList": [],
            "clauses": []
        }]
    });

    match canonicalizer.canonicalize(&skeleton) {
        Ok(result) => {
            println!("{}", String::from_utf8_lossy(&result.bytes));
            eprintln!("pruned: {}", result.report.pruned_paths.join(", "));
        }
        Err(err) => {
            eprintln!("canonicalization failed: {}", err);
            std::process::exit(1);
        }
    }
}
