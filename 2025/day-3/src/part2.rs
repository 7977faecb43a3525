use chumsky::prelude::*;
use miette::*;
use rayon::prelude::*;

use crate::joltage;

/// Part two turns on up to twelve batteries per bank.
const BATTERIES: usize = 12;

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

    // Every bank is independent, so the per-bank maxima reduce in parallel.
    // Addition is associative and commutative, the reduction order is free.
    let total: u64 = banks
        .par_iter()
        .map(|bank| joltage::max_joltage(bank, BATTERIES))
        .try_reduce(
            || 0,
            |acc, joltage| {
                acc.checked_add(joltage)
                    .ok_or_else(|| miette!("total joltage overflows a u64"))
            },
        )?;

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "987654321111111
811111111111119
234234234234278
818181911112111";
        assert_eq!("3121910778619", process(input)?);
        Ok(())
    }

    #[test]
    fn a_document_totals_the_sum_of_its_banks() -> Result<()> {
        let first: u64 = process("987654321111111")?.parse().into_diagnostic()?;
        let second: u64 = process("811111111111119")?.parse().into_diagnostic()?;
        let both: u64 = process("987654321111111\n811111111111119")?
            .parse()
            .into_diagnostic()?;
        assert_eq!(first + second, both);
        Ok(())
    }

    #[test]
    fn refuses_a_bank_past_the_supported_length() {
        let input = "1".repeat(joltage::MAX_BANK_LEN + 1);
        assert!(process(&input).is_err());
    }

    #[test]
    fn refuses_non_digit_input() {
        assert!(process("12a34").is_err());
    }
}
