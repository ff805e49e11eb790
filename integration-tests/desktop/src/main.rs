use colored::Colorize as _;
use std::process;

// each fixture opens its own window and panics on failure
macro_rules! tests {
  ($($name:expr, $module:ident),*) => {
    $(
      mod $module;
    )*

    const TEST_NAMES: &[&str] = &[$( $name ),*];

    // false if no fixture goes by that name
    fn run_test(name: &str) -> bool {
      $(
        if name == $name {
          $module::fixture();
          return true;
        }
      )*

      false
    }
  }
}

tests! {
  "program-from-files", program_from_files,
  "missing-shader-file", missing_shader_file,
  "activate-then-delete", activate_then_delete,
  "distinct-programs", distinct_programs,
  "compile-error", compile_error,
  "render-triangle", render_triangle
}

fn print_test_names() {
  for test_name in TEST_NAMES {
    println!("  -> {}", test_name.blue());
  }
}

fn main() {
  let test_name = match std::env::args().nth(1) {
    Some(test_name) => test_name,
    None => {
      println!("Please provide a test name. Possible values");
      print_test_names();
      process::exit(2);
    }
  };

  println!("test name: {}", test_name.green());

  if run_test(&test_name) {
    println!("{} passed", test_name.green());
  } else {
    println!("{} is not a valid test. Possible values", test_name.red());
    print_test_names();
    process::exit(2);
  }
}
