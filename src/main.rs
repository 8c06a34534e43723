#[cfg(feature = "ssr")]
#[tokio::main]
pub async fn main() -> traduko::server::error::ServerResult<()> {
    use log::LevelFilter;
    use traduko::server::config::TradukoConfig;

    if std::env::args().collect::<Vec<_>>().get(1) == Some(&"--print-config".to_string()) {
        println!("{}", doku::to_toml::<TradukoConfig>());
        std::process::exit(0);
    }

    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .filter_module("traduko", LevelFilter::Info)
        .init();

    let config = TradukoConfig::read()?;
    traduko::server::start(config).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    use traduko::frontend::app::App;

    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
