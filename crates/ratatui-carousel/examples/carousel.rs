use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::event::Event;
use crossterm::event::KeyEventKind;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui_carousel::autoplay::AutoplayState;
use ratatui_carousel::breakpoint::Breakpoint;
use ratatui_carousel::carousel::Carousel;
use ratatui_carousel::carousel::CarouselOptions;
use ratatui_carousel::crossterm_input;
use ratatui_carousel::input::InputEvent;
use ratatui_carousel::slide::Slide;
use ratatui_carousel::theme::Theme;
use ratatui_carousel::view::CarouselView;
use std::io;
use std::time::Duration;
use std::time::Instant;

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = Theme::default();
    let slides = vec![
        Slide::new(
            "https://images6.alphacoders.com/462/thumb-1920-462371.jpg",
            "Web Development",
            "Building the future of the web",
        ),
        Slide::new(
            "https://source.unsplash.com/random/800x600?programming",
            "Programming",
            "Coding the world of tomorrow",
        ),
        Slide::new(
            "https://source.unsplash.com/random/800x600?coding",
            "Coding",
            "Turning ideas into reality",
        ),
        Slide::new(
            "https://source.unsplash.com/random/800x600?terminal",
            "Terminals",
            "Interfaces without a browser",
        ),
        Slide::new(
            "https://source.unsplash.com/random/800x600?rust",
            "Rust",
            "Fearless systems programming",
        ),
        Slide::new(
            "https://source.unsplash.com/random/800x600?opensource",
            "Open Source",
            "Built in the open",
        ),
    ];

    let mut carousel = Carousel::new(
        slides,
        CarouselOptions {
            autoplay_interval: Duration::from_millis(3000),
            responsive: vec![Breakpoint::new(50, 1), Breakpoint::new(90, 3)],
            ..Default::default()
        },
    );
    carousel.start_autoplay();
    let mut view = CarouselView::new();

    let res = run(&mut terminal, &theme, &mut carousel, &mut view);

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    res
}

fn run<B: ratatui::backend::Backend<Error = io::Error>>(
    terminal: &mut Terminal<B>,
    theme: &Theme,
    carousel: &mut Carousel,
    view: &mut CarouselView,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| {
            let area = f.area();
            let [main, status] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .areas(area);

            let block = Block::default()
                .title("ratatui-carousel (←/→, 1-9 jump, d dots, q quit — drag to swipe)")
                .borders(Borders::ALL);
            let inner = block.inner(main);
            f.render_widget(block, main);

            let buf = f.buffer_mut();
            view.render_default(inner, buf, theme, carousel);

            let position = match carousel.current() {
                Some(current) => format!("{}/{}", current + 1, carousel.len()),
                None => "-/0".to_string(),
            };
            let status_line = format!(
                "slide {position}  visible={}  autoplay={}",
                carousel.visible_slides(),
                autoplay_label(carousel.autoplay_state()),
            );
            buf.set_stringn(
                status.x,
                status.y,
                status_line,
                status.width as usize,
                Style::default(),
            );
        })?;

        carousel.tick(Instant::now());

        if crossterm::event::poll(Duration::from_millis(50))? {
            let ev = crossterm::event::read()?;
            if let Event::Key(key) = &ev {
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, crossterm::event::KeyCode::Char('q'))
                {
                    return Ok(());
                }
            }
            if let Some(ev) = crossterm_input::input_event_from_crossterm(ev) {
                match ev {
                    InputEvent::Mouse(mouse) => {
                        view.handle_mouse(carousel, mouse);
                    }
                    key => {
                        carousel.handle_event(key);
                    }
                }
            }
        }
    }
}

fn autoplay_label(state: AutoplayState) -> &'static str {
    match state {
        AutoplayState::Stopped => "stopped",
        AutoplayState::Running => "running",
        AutoplayState::Paused => "paused",
    }
}
