use cliscan::derive::*;

#[derive(Debug, Default, CliParser)]
#[cliscan(
    program = "derived",
    about = "Inspect and copy a collection of files.",
    dispatch_only
)]
struct Parameters {
    #[cliscan(command = "list", help = "List the files.")]
    list: List,
    #[cliscan(command = "copy", help = "Copy the files into a directory.")]
    copy: CopyFiles,
}

#[derive(Debug, Default, CliParser)]
struct List {
    #[cliscan(short = 'l', help = "Show the details of each file.")]
    long: bool,
    #[cliscan(default = "txt,md", help = "The extensions to include.")]
    extensions: Vec<String>,
    #[cliscan(rest, help = "The files to list.")]
    files: Vec<String>,
}

#[derive(Debug, Default, CliParser)]
struct CopyFiles {
    #[cliscan(index = 0, help = "The destination directory.")]
    destination: String,
    #[cliscan(short = 'n', default = "1", help = "The number of attempts per file.")]
    attempts: u32,
    #[cliscan(name = "dry-run", help = "Only show what would be copied.")]
    dry: bool,
    #[cliscan(rest, help = "The files to copy.")]
    sources: Vec<String>,
}

fn main() {
    let (parameters, path) = Parameters::cli_parse();

    match path.last().map(String::as_str) {
        Some("list") => {
            let List {
                long,
                extensions,
                files,
            } = parameters.list;

            for file in files
                .iter()
                .filter(|file| extensions.iter().any(|e| file.ends_with(&format!(".{e}"))))
            {
                if long {
                    println!("{file} ({} bytes)", file.len());
                } else {
                    println!("{file}");
                }
            }
        }
        Some("copy") => {
            let copy = parameters.copy;
            let action = if copy.dry { "Would copy" } else { "Copying" };

            for source in &copy.sources {
                println!(
                    "{action} '{source}' into '{}' ({} attempts).",
                    copy.destination, copy.attempts
                );
            }
        }
        _ => println!("{parameters:?}"),
    }
}
