use rds_constants::{detect, explode, Constant, DetectOpts};

fn main() {
    env_logger::init();

    let progname = std::env::args().next().unwrap_or_else(|| "rds-probe".into());

    println!("Scanning RDS constants...");
    let constants = match detect(DetectOpts::default()) {
        Ok(constants) => constants,
        Err(err) => explode(&progname, err),
    };

    for constant in Constant::ALL {
        let value = constants.get(constant);
        if value == constant.official() {
            println!("{} is {}", constant, value);
        } else {
            println!(
                "{} is {} (mainline Linux assigns {})",
                constant,
                value,
                constant.official()
            );
        }
    }
}
