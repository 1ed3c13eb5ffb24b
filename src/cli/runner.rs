use crate::{
    cli::Args,
    constants::STDIN_INDICATOR,
    error::Result,
    generator::Generator,
    ioutils::read_from,
    prompt::{get_prompt_provider, Answers, SpecCollector},
};

/// Main CLI runner: collects the project description and generates it.
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    pub fn run(self) -> Result<()> {
        let answers = self.load_answers()?;

        let provider = get_prompt_provider();
        let spec = SpecCollector::new(&provider, self.args.non_interactive)
            .collect(&self.args.default_project_name(), answers)?;
        log::debug!("Collected project description: {spec:?}");

        let generator = Generator::from_config(&self.args.generator_config())?;
        generator.run(&spec, Some(self.args.dir.as_path()))?;
        Ok(())
    }

    /// Retrieves answers from `--answers` or stdin.
    fn load_answers(&self) -> Result<Answers> {
        match self.args.answers.as_deref() {
            Some(STDIN_INDICATOR) => Answers::from_json(&read_from(std::io::stdin())?),
            Some(json) => Answers::from_json(json),
            None => Ok(Answers::default()),
        }
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    Runner::new(args).run()
}
