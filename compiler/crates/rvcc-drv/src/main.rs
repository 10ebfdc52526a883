fn main() {
    let config = match rvcc_drv::parse_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = rvcc_drv::compile(&config) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
