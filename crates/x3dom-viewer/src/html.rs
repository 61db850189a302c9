use std::fmt::Write as _;
use std::io::Write as _;

use crate::VIEWER_VERSION;

/// Rotation aligning the CAD z-up convention with the viewer's y-up.
const SCENE_ROTATION: &str = "1 0 0 -1.57079632679";

/// Externally hosted reference geometry (plane + axes) inlined when
/// axes/plane display is enabled.
const PLANE_URL: &str =
    "https://rawcdn.githack.com/x3dom/component-editor/master/static/x3d/plane.x3d";
const AXES_SMALL_URL: &str =
    "https://rawcdn.githack.com/x3dom/component-editor/master/static/x3d/axesSmall.x3d";
const AXES_URL: &str =
    "https://rawcdn.githack.com/x3dom/component-editor/master/static/x3d/axes.x3d";

const INTERACTION_SCRIPT: &str = r#"    <script>
    var selected_target_color = null;
    var current_selected_shape = null;
    var current_mat = null;
    function fitCamera()
    {
        var x3dElem = document.getElementById('x3d-scene');
        x3dElem.runtime.fitAll();
    }
    function select(the_shape) // called whenever a shape is clicked
    {
        // restore color for previous selected shape
        if (current_mat) {
            current_mat.diffuseColor = selected_target_color;
        }
        // store the shape for future process
        current_selected_shape = the_shape;
        // store color, to be restored later
        var appear = current_selected_shape.getElementsByTagName("Appearance")[0];
        var mat = appear.getElementsByTagName("Material")[0];
        current_mat = mat;
        selected_target_color = mat.diffuseColor;
        mat.diffuseColor = "1, 0.65, 0";
    }
    function onDocumentKeyPress(event) {
      event.preventDefault();
      if (event.key=="t") {  // toggle render of the selected shape
         if (current_selected_shape) {
           if (current_selected_shape.render == "true") {
              current_selected_shape.render = "false";
           }
           else {
              current_selected_shape.render = "true";
           }
         }
      }
    }
    document.addEventListener('keypress', onDocumentKeyPress, false);
    </script>
"#;

/// Console spinner shown while the scene is composed.
struct Spinner {
    frames: &'static [char],
    current: usize,
}

impl Spinner {
    fn new() -> Self {
        Self {
            frames: &['|', '/', '-', '\\'],
            current: 0,
        }
    }

    fn advance(&mut self) -> char {
        let frame = self.frames[self.current];
        self.current = (self.current + 1) % self.frames.len();
        frame
    }
}

/// The static `<head>` of the viewer page.
#[derive(Debug, Clone)]
pub struct HtmlHeader {
    pub bg_gradient: (String, String),
}

impl HtmlHeader {
    pub fn render(&self) -> String {
        format!(
            r#"<head>
    <title>x3dom-viewer {version}</title>
    <meta name='Keywords' content='WebGl,x3dom,CAD'>
    <meta charset="utf-8">
    <link rel="stylesheet" type="text/css" href="https://x3dom.org/release/x3dom.css">
    <script src="https://x3dom.org/release/x3dom.js"></script>
    <style>
        body {{
            background: linear-gradient({color1}, {color2});
            margin: 0px;
            overflow: hidden;
        }}
        #viewer_badge {{
            padding: 5px;
            position: absolute;
            left: 1%;
            bottom: 2%;
            height: 38px;
            width: 280px;
            border-radius: 5px;
            border: 2px solid #f7941e;
            font-family: Arial;
            background-color: #414042;
            color: #ffffff;
            font-size: 14px;
            opacity: 0.5;
        }}
        #commands {{
            padding: 5px;
            position: absolute;
            right: 1%;
            top: 2%;
            height: 65px;
            width: 180px;
            border-radius: 5px;
            border: 2px solid #f7941e;
            font-family: Arial;
            background-color: #414042;
            color: #ffffff;
            font-size: 14px;
            opacity: 0.5;
        }}
        a {{
            color: #f7941e;
            text-decoration: none;
        }}
        a:hover {{
            color: #ffffff;
        }}
    </style>
</head>
"#,
            version = VIEWER_VERSION,
            color1 = self.bg_gradient.0,
            color2 = self.bg_gradient.1,
        )
    }
}

/// The `<body>` of the viewer page: the x3d scene graph with one inline
/// node per exported identifier, plus the interaction script.
#[derive(Debug, Clone)]
pub struct HtmlBody {
    /// Registered identifiers, shapes first then edges, insertion order.
    pub shape_ids: Vec<String>,
    pub axes_plane: bool,
    pub axes_plane_zoom: f64,
}

impl HtmlBody {
    fn scene(&self) -> String {
        let mut scene = String::from(
            "\n\t<x3d id=\"x3d-scene\" style=\"width:100%;border: none\" >\n\t\t<Scene>\n",
        );
        if self.axes_plane {
            let z = self.axes_plane_zoom;
            let _ = write!(
                scene,
                "\t\t<transform scale=\"{z},{z},{z}\">\n\
                 \t\t<transform id=\"plane_smallaxe_Id\" rotation=\"{rot}\">\n\
                 \t\t\t<inline url=\"{plane}\" mapDEFToID=\"true\" namespaceName=\"plane\"></inline>\n\
                 \t\t\t<inline url=\"{axes_small}\" mapDEFToID=\"true\" namespaceName=\"axesSmall\"></inline>\n\
                 \t\t</transform>\n\
                 \t\t<inline url=\"{axes}\" mapDEFToID=\"true\" namespaceName=\"axes\"></inline>\n\
                 \t\t</transform>\n",
                rot = SCENE_ROTATION,
                plane = PLANE_URL,
                axes_small = AXES_SMALL_URL,
                axes = AXES_URL,
            );
        }
        // Global rotation so that z is aligned properly.
        let _ = write!(scene, "<transform id=\"global_scene_rotation_Id\" rotation=\"{SCENE_ROTATION}\">");

        let total = self.shape_ids.len();
        let mut spinner = Spinner::new();
        for (current, id) in self.shape_ids.iter().enumerate() {
            // Percentage only makes sense for a non-empty scene; this
            // loop body never runs when there is nothing to compose.
            print!(
                "\r{} composing scene... {}%",
                spinner.advance(),
                (current + 1) * 100 / total
            );
            let _ = std::io::stdout().flush();
            let _ = write!(
                scene,
                "\t\t\t<Inline onload=\"fitCamera()\" mapDEFToID=\"true\" url=\"{id}.x3d\"></Inline>\n"
            );
        }
        if total > 0 {
            println!();
        }
        scene.push_str("</transform>\t\t</Scene>\n\t</x3d>\n");
        scene
    }

    pub fn render(&self) -> String {
        format!(
            r#"<body>
    {scene}
    <div id="viewer_badge">
        x3dom-viewer {version} &middot; <a href="https://www.x3dom.org" target="_blank">x3dom</a> renderer
    </div>
    <div id="commands">
    <b>t</b> view/hide shape<br>
    <b>r</b> reset view<br>
    <b>a</b> show all<br>
    <b>u</b> upright<br>
    </div>
{script}</body>
"#,
            scene = self.scene(),
            version = VIEWER_VERSION,
            script = INTERACTION_SCRIPT,
        )
    }
}
