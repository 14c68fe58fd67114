mod matchup;

fn main() {
    println!("<!-- {}x{} {} -->", matchup::WIDTH, matchup::HEIGHT, matchup::FILL);
    println!("{}", matchup::SVG);
}
