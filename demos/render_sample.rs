use label_print::label::{self, LabelRequest, LabelSize};

fn main() {
    // Render one label of each size for a quick look in a PDF viewer
    let request = LabelRequest {
        name: "Sample Product".to_string(),
        size: LabelSize::Single,
    };
    let label = label::render(&request).unwrap();
    std::fs::write(&label.filename, &label.bytes).unwrap();
    println!("Created {} ({} bytes)", label.filename, label.bytes.len());

    let request = LabelRequest {
        name: "Sample Product".to_string(),
        size: LabelSize::Dual,
    };
    let label = label::render(&request).unwrap();
    std::fs::write(&label.filename, &label.bytes).unwrap();
    println!("Created {} ({} bytes)", label.filename, label.bytes.len());
}
