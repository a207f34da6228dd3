use crate::calendar::{self, DateInfo, DateUnit};

use super::error::Result;
use super::Env;

pub fn add(env: &Env, date: &str, amount: i64, unit: &str) -> Result<()> {
    let date = env.parse_date(date)?;
    let unit = unit.parse::<DateUnit>()?;
    let result = calendar::shift(date, amount, unit)?;
    let info = DateInfo::new(result, env.today);

    println!("{date} + {amount} {unit} = {result}");
    println!("  -> {}", info.formatted());
    Ok(())
}
