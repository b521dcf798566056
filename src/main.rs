fn main() -> std::process::ExitCode {
    unit_converter_lib::run()
}
