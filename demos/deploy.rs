use clbind::{Command, CommandLineBinder, Parameter};

#[derive(Debug)]
struct Deploy {
    verbose: bool,
    target: String,
    replicas: u16,
    ratio: Option<f64>,
}

impl Deploy {
    fn build(&mut self) {
        if self.verbose {
            println!("Building with {self:?}.");
        }
        println!("Build complete.");
    }

    fn release(&mut self) {
        match self.ratio {
            Some(ratio) => println!(
                "Releasing {} replicas to '{}' at a {ratio} rollout.",
                self.replicas, self.target
            ),
            None => println!("Releasing {} replicas to '{}'.", self.replicas, self.target),
        }
    }
}

fn main() {
    let mut deploy = Deploy {
        verbose: false,
        target: "staging".to_string(),
        replicas: 1,
        ratio: None,
    };

    let outcome = CommandLineBinder::new("deploy")
        .command(Command::new("build", Deploy::build).help("Build the project."))
        .command(
            Command::new("release", Deploy::release)
                .help("Release the build to a target.\nRequires credentials.")
                .usage("release -target NAME [-replicas N]"),
        )
        .add(
            Parameter::new("verbose", |deploy: &mut Deploy| &mut deploy.verbose)
                .toggle()
                .help("Print more output."),
        )
        .add(
            Parameter::new("target", |deploy: &mut Deploy| &mut deploy.target)
                .commands(["release"])
                .help("The release target."),
        )
        .add(
            Parameter::new("replicas", |deploy: &mut Deploy| &mut deploy.replicas)
                .commands(["release"])
                .help("How many replicas to run."),
        )
        .add(
            Parameter::new("ratio", |deploy: &mut Deploy| &mut deploy.ratio)
                .commands(["release"])
                .help("The rollout ratio, between 0 and 1."),
        )
        .build()
        .run(&mut deploy);

    std::process::exit(outcome.exit_code());
}
