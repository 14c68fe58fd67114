use matchup_icon::MatchupIcon;

fn main() {
    println!("cargo::rerun-if-changed=icons/matchup.toml");
    if let Err(err) = MatchupIcon::builder("icons/matchup.toml").build() {
        panic!("failed to generate matchup icon: {err}");
    }
}
