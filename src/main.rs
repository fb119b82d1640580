use regcolor_lib as regcolor;

fn main() {
    let options = regcolor::options::get();
    regcolor::logger::init(options.log_level()).expect("Logger initialization failed");

    if let Err(()) = regcolor::driver::drive(options) {
        std::process::exit(1);
    }
}
