fn main() {
    cygroots::cli::run();
}
