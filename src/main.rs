fn main() {
    promptology::app::cli::run();
}
