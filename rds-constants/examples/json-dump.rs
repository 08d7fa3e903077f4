use rds_constants::{detect, DetectOpts};

fn main() {
    env_logger::init();

    let constants = detect(DetectOpts::default());
    let json_dump = match constants {
        Ok(constants) => serde_json::to_string_pretty(&constants),
        Err(err) => serde_json::to_string_pretty(&serde_json::json!({ "error": err })),
    }
    .unwrap();
    println!("{}", json_dump)
}
