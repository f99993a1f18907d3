use log::error;

fn main() {
    env_logger::init();

    if let Err(e) = randq::cmd::run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
