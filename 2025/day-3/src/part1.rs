use chumsky::prelude::*;
use miette::*;

use crate::joltage;

/// Part one turns on exactly two batteries per bank.
const BATTERIES: usize = 2;

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<&'a str>, extra::Err<Rich<'a, char>>> {
    text::digits(10)
        .to_slice()
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let banks = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let total = banks.iter().try_fold(0u64, |acc, bank| {
        let joltage = joltage::max_joltage(bank, BATTERIES)?;
        acc.checked_add(joltage)
            .ok_or_else(|| miette!("total joltage overflows a u64"))
    })?;

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("987654321111111", "98")]
    #[case("811111111111119", "89")]
    #[case("234234234234278", "78")]
    #[case("818181911112111", "92")]
    fn single_bank(#[case] bank: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(bank)?);
        Ok(())
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "987654321111111
811111111111119
234234234234278
818181911112111";
        assert_eq!("357", process(input)?);
        Ok(())
    }
}
