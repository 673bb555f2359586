use crate::utils::*;
use clap::Args;
use lights_out_core as game;
use yew::prelude::*;

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct BoardProps {
    /// Number of rows of the board
    #[arg(long, default_value_t = game::BoardConfig::DEFAULT.rows)]
    pub rows: game::Coord,

    /// Number of columns of the board
    #[arg(long, default_value_t = game::BoardConfig::DEFAULT.cols)]
    pub cols: game::Coord,

    /// Chance any cell is lit at the start of a game
    #[arg(long, default_value_t = game::BoardConfig::DEFAULT.lit_probability)]
    pub chance: f64,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<String>,
}

impl BoardProps {
    fn config(&self) -> game::Result<game::BoardConfig> {
        game::BoardConfig::new(self.rows, self.cols, self.chance)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Toggle(game::Coord2),
    NewGame,
}

fn cell_classes(lit: bool) -> Classes {
    classes!("cell", lit.then_some("lit"))
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    row: game::Coord,
    col: game::Coord,
    lit: bool,
    callback: Callback<game::Coord2>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        row,
        col,
        lit,
        callback,
    } = props.clone();

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) clicked", row, col);
        callback.emit((row, col));
    });

    html! {
        <td class={cell_classes(lit)} {onclick}/>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct ErrorProps {
    pub message: AttrValue,
}

/// Shown in place of the board when the game cannot be set up.
#[function_component(ErrorView)]
pub(crate) fn error_component(props: &ErrorProps) -> Html {
    html! {
        <div class="lights-out">
            <p class="error">{props.message.clone()}</p>
        </div>
    }
}

#[derive(Debug)]
pub(crate) struct BoardView {
    session: game::Result<game::PlayEngine>,
}

impl BoardView {
    fn start(props: &BoardProps, seed: u64) -> Self {
        let session = props.config().map(|config| {
            game::PlayEngine::generate(game::RandomBoardGenerator::new(seed), config)
        });
        Self { session }
    }

    fn toggle(&mut self, coords: game::Coord2) -> bool {
        let Ok(engine) = self.session.as_mut() else {
            return false;
        };

        match engine.toggle(coords) {
            Ok(outcome) => {
                log::debug!("toggle {:?}: {:?}", coords, outcome);
                true
            }
            Err(err) => {
                log::warn!("toggle {:?} rejected: {}", coords, err);
                false
            }
        }
    }

    fn view_board(ctx: &Context<Self>, engine: &game::PlayEngine) -> Html {
        if engine.is_finished() {
            return html! { <p class="won">{"You won!"}</p> };
        }

        let (rows, cols) = engine.size();
        let callback = ctx.link().callback(Msg::Toggle);

        html! {
            <table class="board">
                <tbody>
                {
                    for (0..rows).map(|row| html! {
                        <tr>
                            {
                                for (0..cols).map(|col| {
                                    let lit = engine.is_lit((row, col));
                                    let callback = callback.clone();
                                    html! {
                                        <CellView {row} {col} {lit} {callback}/>
                                    }
                                })
                            }
                        </tr>
                    })
                }
                </tbody>
            </table>
        }
    }
}

impl Component for BoardView {
    type Message = Msg;
    type Properties = BoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props
            .seed
            .as_deref()
            .map(seed_from_str)
            .unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let view = Self::start(props, seed);
        if let Err(err) = &view.session {
            log::error!("invalid board config {:?}: {}", props, err);
        }
        view
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Toggle(coords) => self.toggle(coords),
            NewGame => {
                let seed = js_random_seed();
                log::debug!("new game, seed: {}", seed);
                *self = Self::start(ctx.props(), seed);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let engine = match &self.session {
            Ok(engine) => engine,
            Err(err) => {
                let message = AttrValue::from(err.to_string());
                return html! { <ErrorView {message}/> };
            }
        };
        let cb_new_game = ctx.link().callback(|_: MouseEvent| Msg::NewGame);
        let moves = engine.move_count();

        html! {
            <div class="lights-out">
                <nav>
                    <aside>{format!("{} moves", moves)}</aside>
                    <button onclick={cb_new_game}>{"New game"}</button>
                </nav>
                {Self::view_board(ctx, engine)}
            </div>
        }
    }
}
