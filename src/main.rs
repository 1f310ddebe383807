use std::{env, fs::read_to_string, path::PathBuf, process::exit, rc::Rc, time::Instant};

use tern::{display_error, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let start = Instant::now();

    let mut path_buf_string = env::current_dir().unwrap().into_os_string();
    path_buf_string.push("/");
    path_buf_string.push(file_path);
    let file_contents = read_to_string(path_buf_string.clone()).expect("Failed to read file!");

    let tokens = tokenize(file_contents, Some(String::from(file_name)));

    if tokens.is_err() {
        display_error(tokens.err().unwrap(), PathBuf::from(path_buf_string));
        exit(1);
    }

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let ast = parse(tokens.unwrap(), Rc::new(String::from(file_name)));

    println!("Parsed in {:?}", parse_start.elapsed());

    if ast.is_err() {
        display_error(ast.err().unwrap(), PathBuf::from(path_buf_string));
        exit(1);
    }

    let ast = ast.unwrap();

    println!("Total time: {:?}", start.elapsed());
    println!("{}", pretty_print(format!("{:?}", ast)));
}

fn pretty_print(string: String) -> String {
    let mut result = String::new();
    let mut indent = 0;
    let mut ignore_next_space = false;

    for c in string.chars() {
        match c {
            '{' => {
                indent += 1;
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            '(' | '[' => {
                indent += 1;
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
            }
            '}' | ')' | ']' => {
                indent -= 1;
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                result.push(c);
            }
            ',' => {
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            ' ' if ignore_next_space => {
                ignore_next_space = false;
            }
            _ => result.push(c),
        }
    }

    result
}
