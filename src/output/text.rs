use crate::error::AppResult;

pub fn print_lines(lines: &[String]) -> AppResult<()> {
    for line in lines {
        println!("{line}");
    }
    Ok(())
}
