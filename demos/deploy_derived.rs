use clbind::derive::*;

#[derive(Debug, BinderProgram)]
#[binder(program = "deploy_derived")]
#[command(key = "build", run = Self::build, help = "Build the project.")]
#[command(
    key = "release",
    run = Self::release,
    help = "Release the build to a target.\nRequires credentials.",
    usage = "release -target NAME [-replicas N]"
)]
struct Deploy {
    #[parameter(toggle, help = "Print more output.")]
    verbose: bool,
    #[parameter(commands = ["release"], help = "The release target.")]
    target: String,
    #[parameter(commands = ["release"], help = "How many replicas to run.")]
    replicas: u16,
    #[parameter(commands = ["release"], help = "The rollout ratio, between 0 and 1.")]
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

    let outcome = deploy.clbind_run();
    std::process::exit(outcome.exit_code());
}
