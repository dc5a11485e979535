use alloy_primitives::{Address, B256, U256};
use claimswap_core::{quote_buy, quote_sell, Reserves};
use claimswap_merkle::{parse_address_list, verify, MerkleTree, ProofBook};
use clap::{Parser, Subcommand, ValueEnum};
use eyre::{bail, WrapErr};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::info;

/// ClaimSwap operator tooling.
#[derive(Parser, Debug)]
#[command(name = "claimswap", version, about = "ClaimSwap allowlist and pool tooling")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Build the allowlist tree from an address list and write the proof book
    BuildTree {
        /// File with one address per line (`#` starts a comment)
        #[arg(long, short)]
        input: PathBuf,
        /// Where to write the proof book JSON
        #[arg(long, short)]
        output: PathBuf,
    },
    /// Look up the proof for an account in a proof book
    Proof {
        /// Proof book JSON produced by `build-tree`
        #[arg(long, env = "CLAIMSWAP_PROOF_BOOK")]
        tree: PathBuf,
        /// Account to look up
        #[arg(long)]
        address: Address,
    },
    /// Verify a proof against a root
    Verify {
        /// Allowlist root
        #[arg(long, env = "CLAIMSWAP_MERKLE_ROOT")]
        root: B256,
        /// Claiming account
        #[arg(long)]
        address: Address,
        /// Comma separated sibling hashes
        #[arg(long, value_delimiter = ',')]
        proof: Vec<B256>,
    },
    /// Re-verify every proof stored in a proof book
    Check {
        /// Proof book JSON produced by `build-tree`
        #[arg(long, env = "CLAIMSWAP_PROOF_BOOK")]
        tree: PathBuf,
    },
    /// Quote a trade against the given reserves (base units)
    Quote {
        /// Trade direction
        #[arg(value_enum)]
        side: Side,
        /// Native value for a buy, tokens for a sell
        amount: U256,
        /// Token reserve of the pool
        #[arg(long)]
        reserve_asset: U256,
        /// Native value reserve of the pool
        #[arg(long)]
        reserve_value: U256,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Buy,
    Sell,
}

impl Command {
    pub(crate) fn run<W: Write>(self, out: &mut W) -> eyre::Result<()> {
        match self {
            Self::BuildTree { input, output } => build_tree(&input, &output, out),
            Self::Proof { tree, address } => {
                let book = load_book(&tree)?;
                let answer = book.lookup(address);
                writeln!(out, "{}", serde_json::to_string_pretty(&answer)?)?;
                Ok(())
            }
            Self::Verify { root, address, proof } => {
                if !verify(root, &proof, address) {
                    bail!("proof for {address} does not match root {root}");
                }
                writeln!(out, "valid")?;
                Ok(())
            }
            Self::Check { tree } => {
                let book = load_book(&tree)?;
                book.check()?;
                writeln!(out, "{} proofs match root {}", book.len(), book.root())?;
                Ok(())
            }
            Self::Quote { side, amount, reserve_asset, reserve_value } => {
                let reserves = Reserves::new(reserve_asset, reserve_value);
                match side {
                    Side::Buy => {
                        let asset_out = quote_buy(reserves, amount)?;
                        writeln!(out, "asset_out: {asset_out}")?;
                    }
                    Side::Sell => {
                        let quote = quote_sell(reserves, amount)?;
                        writeln!(out, "fee: {}", quote.fee)?;
                        writeln!(out, "amount_after_fee: {}", quote.amount_after_fee)?;
                        writeln!(out, "value_out: {}", quote.value_out)?;
                    }
                }
                Ok(())
            }
        }
    }
}

fn build_tree<W: Write>(input: &Path, output: &Path, out: &mut W) -> eyre::Result<()> {
    let text = fs::read_to_string(input)
        .wrap_err_with(|| format!("failed to read address list {}", input.display()))?;
    let accounts = parse_address_list(&text)?;
    let tree = MerkleTree::from_accounts(accounts)?;
    let book = ProofBook::from_tree(&tree);

    fs::write(output, book.to_json()?)
        .wrap_err_with(|| format!("failed to write proof book {}", output.display()))?;
    info!(accounts = tree.len(), depth = tree.depth(), root = %tree.root(), "proof book written");
    writeln!(out, "{}", tree.root())?;
    Ok(())
}

fn load_book(path: &Path) -> eyre::Result<ProofBook> {
    let json = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read proof book {}", path.display()))?;
    Ok(ProofBook::from_json(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const ALICE: &str = "0x00000000000000000000000000000000000000a1";
    const BOB: &str = "0x00000000000000000000000000000000000000b0";

    fn run(command: Command) -> eyre::Result<String> {
        let mut buf = Vec::new();
        command.run(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    fn parse(args: &[&str]) -> Command {
        Cli::try_parse_from(std::iter::once("claimswap").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    #[test]
    fn build_lookup_and_verify_round_trip() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("allowlist.txt");
        let output = dir.path().join("book.json");
        fs::write(&input, format!("# launch list\n{ALICE}\n\n{BOB} # partner\n")).unwrap();

        let printed = run(parse(&[
            "build-tree",
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ]))
        .unwrap();
        let root: B256 = printed.trim().parse().unwrap();

        let book = ProofBook::from_json(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(book.root(), root);
        assert_eq!(book.len(), 2);

        let answer = run(parse(&["proof", "--tree", output.to_str().unwrap(), "--address", ALICE]))
            .unwrap();
        let answer: serde_json::Value = serde_json::from_str(&answer).unwrap();
        assert_eq!(answer["eligible"], serde_json::Value::Bool(true));

        let alice: Address = ALICE.parse().unwrap();
        let proof = book.lookup(alice).proof;
        let joined = proof.iter().map(ToString::to_string).collect::<Vec<_>>().join(",");
        let root_arg = root.to_string();
        let verified = run(parse(&[
            "verify",
            "--root",
            &root_arg,
            "--address",
            ALICE,
            "--proof",
            &joined,
        ]))
        .unwrap();
        assert_eq!(verified.trim(), "valid");

        let checked = run(parse(&["check", "--tree", output.to_str().unwrap()])).unwrap();
        assert!(checked.starts_with("2 proofs match root"));
    }

    #[test]
    fn verify_rejects_wrong_address() {
        let alice: Address = ALICE.parse().unwrap();
        let bob: Address = BOB.parse().unwrap();
        let tree = MerkleTree::from_accounts([alice, bob]).unwrap();
        let proof = tree.proof(&alice).unwrap();

        let err = run(Command::Verify { root: tree.root(), address: bob, proof }).unwrap_err();
        assert!(err.to_string().contains("does not match root"));
    }

    #[test]
    fn build_tree_reports_bad_lines() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("allowlist.txt");
        fs::write(&input, format!("{ALICE}\nnot-an-address\n")).unwrap();

        let err = run(Command::BuildTree { input, output: dir.path().join("book.json") })
            .unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn quotes_match_pool_math() {
        let printed = run(parse(&[
            "quote",
            "buy",
            "1000000000000000000",
            "--reserve-asset",
            "50000000000000000000",
            "--reserve-value",
            "1000000000000000000",
        ]))
        .unwrap();
        assert_eq!(printed.trim(), "asset_out: 25000000000000000000");

        let printed = run(parse(&[
            "quote",
            "sell",
            "500",
            "--reserve-asset",
            "1000",
            "--reserve-value",
            "1000",
        ]))
        .unwrap();
        // fee floors to 1; 1000 * 499 / (1000 + 499) = 332
        assert_eq!(printed, "fee: 1\namount_after_fee: 499\nvalue_out: 332\n");
    }
}
